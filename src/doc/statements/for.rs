/*!
# `For(<variable>,<start>,<end>[,<step>]):<commands>:End`

## Purpose
Count a number variable through a range.

## Remarks
The step defaults to 1 and may be negative but not 0.
The variable keeps the first value past `end` when the loop finishes.
When `start` is already past `end` the body does not run.

## Example
```text
For(I,1,3)
Disp I
End
               1
               2
               3
```

*/
