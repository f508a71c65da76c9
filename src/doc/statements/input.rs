/*!
# `Input [<prompt>,]<variable>` and `Prompt <variable>[,<variable>...]`

## Purpose
Read values typed by the user.

## Remarks
`Input` shows `?` unless a prompt string is given. `Prompt` asks for
each variable by name. String variables store the text as typed.
Other variables need a real number. Lists cannot be read this way.

## Example
```text
Input "AGE?",A
Prompt B,Str1
```

*/
