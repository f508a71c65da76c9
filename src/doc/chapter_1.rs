/*!
# Expressions and Types

Every value is a number, a string, or a list of numbers.

Numbers are complex. Most of the time the imaginary part is zero and
you will never see it, but `√(-4)` is `2i` and `(1+2i)(1-2i)` is `5`.
Comparing with `<`, `≤`, `>` or `≥` needs real numbers and fails with
`ERR:NONREAL COMPARISON` otherwise. `=` and `≠` work on any numbers.

Strings are written in double quotes. The closing quote may be left
off at the end of a line. `+` joins strings.

```text
"HELLO "+"WORLD
```

Lists are written in braces. Arithmetic on a list applies to every
element, and two lists must have the same length.

```text
{1,2,3}*2
{2,4,6}
```

## Variables

 * `A` through `Z` and `θ` hold numbers and start as 0.
 * `Str0` through `Str9` hold strings.
 * `L1` through `L6` and custom lists `∟NAME` of up to five
   characters hold lists of at most 999 elements. `L1(2)` is an element.

Reading a string or list that was never stored is `ERR:UNDEFINED`.

## Operators

From tightest to loosest binding:

 * functions and parentheses
 * postfix `!`, `²`, `³`, `⁻¹`
 * `^` and `ˣ√`
 * negation `⁻`
 * `nPr`, `nCr`
 * `*`, `/`, and multiplication by juxtaposition such as `2A` or `3(4)`
 * `+`, `-`
 * `=`, `≠`, `<`, `≤`, `>`, `≥`
 * `and`
 * `or`, `xor`

A closing parenthesis or brace at the end of a line may be omitted.

## Display modes

`Float` shows up to ten significant digits. `Fix n` rounds to n decimal
places. `Normal` notation is the only one implemented; after `Sci` or
`Eng` displaying a number is `ERR:MODE`.
*/
