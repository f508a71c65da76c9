/*!
# Introductory Tutorial for TI-Basic

Begin by opening a terminal and running the executable with no
arguments. You are at the home screen, where each line you type is
run as soon as you press ENTER and its result is shown.
Type CTRL-D or `exit` to leave.

```text
> 2+3
                   5
> Ans*2
                  10
```

`Ans` always holds the result of the last expression. Storing a value
uses the arrow `→`, which may also be typed as `->`.

```text
> 5→A
                   5
> A²+1
                  26
```

The home screen runs one line at a time so it does not accept control
flow. `If`, `While`, `For(`, `Goto` and friends belong in programs.
A program is a text file named after the program with the extension
`.tib`. Put this in `COUNT.tib`:

```text
0→A
While A<5
A+1→A
Disp A
End
```

Then run it with `tibasic COUNT.tib`. Commands may be separated by
newlines or by `:`. Other programs in the same directory can be
called with `prgmNAME`.

Stop a running program with CTRL-C.
*/
