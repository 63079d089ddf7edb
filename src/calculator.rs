/// # Arithmetic operations
/// numeric add/subtract/multiply/divide plus dispatch by the operation name
/// string received from the form layer
pub mod arithmetic;
/// # Text-level calculator API
/// the entry points the external form layer calls: expression strings in,
/// LaTeX/grid strings or numbers out, every failure a typed `CalcError`
pub mod text_api;
