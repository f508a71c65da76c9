/*!
# `IS>(<variable>,<value>)` and `DS<(<variable>,<value>)`

## Purpose
Step a number variable and maybe skip the next command.

## Remarks
`IS>(` adds 1 and skips the next command when the variable is then
greater than the value. `DS<(` subtracts 1 and skips when it is less.

## Example
```text
5→A
IS>(A,5)
Disp "NOT SHOWN"
```

*/
