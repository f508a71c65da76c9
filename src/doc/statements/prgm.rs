/*!
# `prgm<name>`, `Return` and `Stop`

## Purpose
Run another program as a subroutine.

## Remarks
Program names are one letter or `θ` followed by up to seven letters or
digits. A program not yet loaded is read from `<NAME>.tib` in the
program directory. `Return` goes back to the caller, as does reaching
the end of the program. `Stop` ends every running program.
Subprograms share all variables with their caller.

## Example
```text
prgmSETUP
Disp A
Stop
```

*/
