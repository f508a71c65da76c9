/*!
# `If <condition>`
Also `If <condition>:Then:<commands>[:Else:<commands>]:End`.

## Purpose
Do something contingent on a condition.

## Remarks
When the command after `If` is not `Then`, only that one command is
conditional. A false condition skips exactly one command.
With `Then`, everything up to the matching `Else` or `End` is the block.
A condition is true when its real part is nonzero. Conditions with an
imaginary part are a `DOMAIN` error.

## Example
```text
0→A
If A:Disp "SKIPPED"
If A=0
Then
Disp "ZERO"
Else
Disp "NONZERO"
End
ZERO
```

*/
