/*!
# Functions

Trigonometric functions work in radians. Functions that take a
number also take a list and apply to each element unless noted.

# Commands

`Disp`, `ClrHome`, `Pause`, `Input`, `Prompt`, `ClrList`, `DelVar`,
`Float`, `Fix`, `Normal`, `Sci` and `Eng` are written as the first word
of a command. `Output(`, `SortA(`, `SortD(` and `Fill(` take their
arguments in parentheses. None of these can be used inside an expression.
*/

pub mod abs {
    /*!
    ## `abs(X)` Returns the absolute value, or magnitude, of X.
    ```text
    abs(-3)
                       3
    abs(3+4i)
                       5
    ```
    */
}

pub mod round {
    /*!
    ## `round(X[,N])` Rounds X to N decimal places, 9 if omitted.
    ```text
    round(π,2)
                    3.14
    ```
    */
}

pub mod iPart {
    /*!
    ## `iPart(X)`, `fPart(X)`, `int(X)` Integer and fractional parts.
    `int(` rounds down while `iPart(` rounds toward zero.
    ```text
    int(-2.5)
                      -3
    iPart(-2.5)
                      -2
    ```
    */
}

pub mod trig {
    /*!
    ## `sin(X)`, `cos(X)`, `tan(X)` Trigonometric functions in radians.
    */
}

pub mod logs {
    /*!
    ## `ln(X)`, `log(X)`, `e^(X)` Natural and common logarithms and the exponential.
    Logarithms of negative numbers are complex.
    ```text
    log(1000)
                       3
    ```
    */
}

pub mod complex {
    /*!
    ## `real(Z)`, `imag(Z)`, `conj(Z)`, `angle(Z)` Parts of a complex number.
    ```text
    imag(3+4i)
                       4
    ```
    */
}

pub mod lists {
    /*!
    ## `dim(L)`, `sum(L)`, `prod(L)`, `max(`, `min(`, `augment(` Lists.
    `max(` and `min(` take one list, or two values compared element by
    element. `augment(` joins two lists or two strings.
    ```text
    sum({1,2,3})
                       6
    augment({1},{2,3})
                 {1,2,3}
    ```
    */
}

pub mod strings {
    /*!
    ## `length(S)`, `sub(S,start,count)` Strings.
    Positions count from 1.
    ```text
    sub("HELLO",2,3)
    ELL
    ```
    */
}

pub mod integers {
    /*!
    ## `remainder(A,B)`, `gcd(A,B)`, `lcm(A,B)`, `nPr`, `nCr`, `!` Integer math.
    Choosing more items than there are gives 0.
    ```text
    5nCr2
                      10
    2nCr5
                       0
    ```
    */
}

pub mod random {
    /*!
    ## `rand`, `randInt(A,B)` Random numbers.
    `rand` is in [0,1). `randInt(` includes both bounds.
    */
}

pub mod logic {
    /*!
    ## `and`, `or`, `xor`, `not(X)` Logic.
    Nonzero is true. Results are 1 or 0.
    */
}
