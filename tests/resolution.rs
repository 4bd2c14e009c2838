use indoc::indoc;

#[macro_use]
mod cases;

resolution_case! {
    name: nested_group,
    formula: "a * (b - c)",
    inputs: [("a", "2"), ("b", "5"), ("c", "1")],
    resolution: indoc! {"
        a * (b - c)
        a = 2, b = 5, c = 1
        5 - 1 = 4
        2 * 4 = 8"},
}

resolution_case! {
    name: simple_sum,
    formula: "a + b",
    inputs: [("a", "45"), ("b", "70")],
    resolution: indoc! {"
        a + b
        a = 45, b = 70
        45 + 70 = 115"},
}

resolution_case! {
    name: precedence,
    formula: "a + b * c",
    inputs: [("a", "2"), ("b", "3"), ("c", "4")],
    resolution: indoc! {"
        a + b * c
        a = 2, b = 3, c = 4
        3 * 4 = 12
        2 + 12 = 14"},
}

resolution_case! {
    name: third_under_five_digits,
    formula: "a / b",
    context: (5, HalfUp),
    inputs: [("a", "1"), ("b", "3")],
    resolution: indoc! {"
        a / b
        a = 1, b = 3
        1 / 3 = 0.33333"},
}

resolution_case! {
    name: repeated_constant,
    formula: "a + 5 - 5 + b",
    inputs: [("a", "1"), ("b", "2")],
    resolution: indoc! {"
        a + 5 - 5 + b
        a = 1, b = 2
        1 + 5 = 6
        6 - 5 = 1
        1 + 2 = 3"},
}

resolution_case! {
    name: single_constant,
    formula: "45",
    inputs: [],
    resolution: indoc! {"
        45
        45 = 45"},
}

resolution_case! {
    name: power_and_factorial,
    formula: "pow(x, 3) - factorial(4)",
    inputs: [("x", "2")],
    resolution: indoc! {"
        pow(x, 3) - factorial(4)
        x = 2
        pow(2, 3) = 8
        factorial(4) = 24
        8 - 24 = -16"},
}

resolution_case! {
    name: rounding_down,
    formula: "(a + b) / c",
    context: (3, Down),
    inputs: [("a", "1"), ("b", "1"), ("c", "3")],
    resolution: indoc! {"
        (a + b) / c
        a = 1, b = 1, c = 3
        1 + 1 = 2
        2 / 3 = 0.666"},
}

resolution_case! {
    name: ceiling_on_negative,
    formula: "a / b",
    context: (2, Ceiling),
    inputs: [("a", "-2"), ("b", "3")],
    resolution: indoc! {"
        a / b
        a = -2, b = 3
        -2 / 3 = -0.66"},
}

resolution_case! {
    name: nested_calls,
    formula: "factorial(pow(a, 2) - b)",
    inputs: [("a", "2"), ("b", "1")],
    resolution: indoc! {"
        factorial(pow(a, 2) - b)
        a = 2, b = 1
        pow(2, 2) = 4
        4 - 1 = 3
        factorial(3) = 6"},
}

resolution_case! {
    name: chained_sums,
    formula: "a + b + c",
    inputs: [("a", "1"), ("b", "1"), ("c", "1")],
    resolution: indoc! {"
        a + b + c
        a = 1, b = 1, c = 1
        1 + 1 = 2
        2 + 1 = 3"},
}

resolution_case! {
    name: terminating_quotient,
    formula: "a / b * c",
    inputs: [("a", "1"), ("b", "8"), ("c", "4")],
    resolution: indoc! {"
        a / b * c
        a = 1, b = 8, c = 4
        1 / 8 = 0.125
        0.125 * 4 = 0.500"},
}
