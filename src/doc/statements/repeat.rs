/*!
# `Repeat <condition>:<commands>:End`

## Purpose
Repeat commands until a condition holds.

## Remarks
The body always runs at least once. The condition is only tested
at `End`, and the loop ends once it is true.

## Example
```text
0→A
Repeat A≥3
A+1→A
End
```

*/
