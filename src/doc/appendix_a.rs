/*!
# Error Messages

Errors stop the running program and every program that called it.
They are shown with the program name and the line and column of the
failing command.

```text
ERR:DIVIDE BY 0 IN MAIN 3:5
```

| Message | Cause |
|---|---|
| `SYNTAX` | A line could not be parsed. |
| `DATA TYPE` | A value has the wrong type for where it is used. |
| `ARGUMENT` | Wrong number of arguments or an argument out of range. |
| `DOMAIN` | A math function given a value outside its domain. |
| `DIVIDE BY 0` | Division by zero. |
| `DIM MISMATCH` | Two lists of different lengths. |
| `NONREAL COMPARISON` | `<`, `≤`, `>` or `≥` on a complex number. |
| `UNDEFINED` | A string or list that was never stored. |
| `UNKNOWN VARIABLE` | An unrecognized variable name. |
| `INVALID` | `Then`, `Else` or `End` without its block, or control flow typed at the home screen. |
| `LABEL` | `Goto` to a label that does not exist. |
| `DUPLICATE COMMAND` | A command registered twice under one name. |
| `UNKNOWN COMMAND` | A command that is not registered. |
| `DUPLICATE NAME` | A program loaded twice. |
| `UNDEFINED PROGRAM` | A program that could not be found. |
| `PREPROCESS` | A program with a syntax error. |
| `MODE` | A display mode that is not implemented. |
| `SCREEN BOUNDS` | Screen coordinates outside the screen. |
| `MEMORY` | Blocks or subprograms nested too deep. |
| `BREAK` | Interrupted with CTRL-C. |
| `I/O` | Reading input or a program file failed. |
| `INTERNAL` | A bug. Please report it. |
*/
