/*!
# `While <condition>:<commands>:End`

## Purpose
Repeat commands while a condition holds.

## Remarks
The condition is tested before the first pass and again at every `End`.
If it is false on entry the body is skipped entirely.

## Example
```text
0→A
While A<5
A+1→A
End
A
               5
```

*/
