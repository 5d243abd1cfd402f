//! Macros for ergonomic automaton construction.

/// Build an automaton from an inline table.
///
/// States are written as bare identifiers; symbols are any expression
/// convertible into [`Symbol`](crate::core::Symbol), usually `char` or
/// string literals. The macro evaluates to
/// `Result<Automaton, ValidationError>`.
///
/// # Example
///
/// ```
/// use dfa_trace::dfa;
///
/// let automaton = dfa! {
///     states: [A, B, C],
///     alphabet: ['0', '1'],
///     start: A,
///     accepting: [C],
///     transitions: {
///         (A, '0') => B,
///         (A, '1') => A,
///         (B, '0') => B,
///         (B, '1') => C,
///         (C, '0') => B,
///         (C, '1') => A,
///     }
/// }
/// .unwrap();
///
/// assert!(automaton.accepts("01"));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:ident),* $(,)?],
        alphabet: [$($symbol:expr),* $(,)?],
        start: $start:ident,
        accepting: [$($accepting:ident),* $(,)?],
        transitions: {
            $(($from:ident, $on:expr) => $to:ident),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state(stringify!($state)))*
            $(.symbol($symbol))*
            .start(stringify!($start))
            $(.accept(stringify!($accepting)))*
            $(.transition(stringify!($from), $on, stringify!($to)))*
            .build()
    };
}
