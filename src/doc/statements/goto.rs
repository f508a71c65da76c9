/*!
# `Goto <label>` and `Lbl <label>`

## Purpose
Continue running at a labelled command.

## Remarks
Labels are one or two characters from `A`-`Z`, `0`-`9` and `θ`.
When a label is defined twice the first definition is used and the
later one is ignored.
Jumping out of a `While`, `Repeat`, `For(` or `If` block closes it.

## Example
```text
0→A
Lbl 1
A+1→A
If A<10:Goto 1
```

*/
