/*!
# `Disp <value>[,<value>...]`, `Output(<row>,<column>,<value>)`, `ClrHome` and `Pause`

## Purpose
Put text and values on the home screen.

## Remarks
`Disp` prints strings on the left and numbers on the right, one per
line, scrolling when the screen is full. `Output(` writes at a row and
column counted from 1. Coordinates outside the 16x8 screen are an
`SCREEN BOUNDS` error. `Pause` optionally displays a value, then waits
for a key.

## Example
```text
ClrHome
Output(1,1,"HELLO")
Disp 3.5
```

*/
