/*!
# Limits and Internals

A program is parsed once, when it is first loaded. Parsing produces a
flat list of commands together with a table of labels and a table of
blocks. The block table records, for each `If`-`Then`, `While`,
`Repeat` and `For(`, where its `Else` and `End` are. Nothing is
compiled further; the engine walks the command list with a cursor and
keeps a stack of open blocks for each running program.

Every operator and function is looked up by name in a command table
each time it runs. Hosts embedding the library may register their
own functions and commands the same way the built-in ones are.

 * Lists hold at most 999 elements.
 * The home screen is 16 columns by 8 rows.
 * Programs may call each other 64 deep.
 * At most 128 blocks may be open at once in one program.
 * Program names are 1 to 8 characters, labels 1 or 2, custom list
   names 1 to 5.
*/
