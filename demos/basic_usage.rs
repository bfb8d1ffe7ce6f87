// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see convergence events from the math
// library.

use nfrac::math;
use nfrac::prelude::*;

fn main() -> Result<(), FractionError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Exact Fractions ===\n");

    let mut f = Fraction::new(6, 8)?;
    println!("new(6, 8)          = {}", f);
    f.reduce();
    println!("reduce()           = {}", f);

    let sum = Fraction::new("1.5", 1)?.plus("2.25")?;
    println!("1.5 + 2.25         = {} = {}", sum, sum.reduced());
    println!("as LaTeX           = {}", sum.reduced().to_latex());

    let third = Fraction::from(1).divide(3)?;
    println!("1/3 to 20 places   = {}", third.as_decimal(20));

    println!("\n=== Parsing ===\n");
    for text in ["3/4", "0x1F:4", "\\frac{22}{7}", "1.25e3", "bogus"] {
        println!("{:<14} -> {}", text, Fraction::parse_fraction(text));
    }

    println!("\n=== Math Library (40 digits) ===\n");
    let ctx = MathContext::new(40);
    println!("sqrt(2)   = {}", ctx.sqrt(2)?.as_decimal(40));
    println!("2^(1/3)   = {}", ctx.pow(2, "1/3")?.as_decimal(40));
    println!("sin(1)    = {}", ctx.sin(1)?.as_decimal(40));
    println!("cos(PI)   = {}", ctx.cos(Constant::Pi)?);
    println!("exp(1)    = {}", ctx.exp(1)?.as_decimal(40));
    println!("ln(10)    = {}", ctx.ln(10)?.as_decimal(40));
    println!("log(1000) = {}", ctx.log(1000)?);
    println!("20!       = {}", math::factorial(20)?);

    println!("\n=== Constants ===\n");
    for constant in Constant::ALL {
        println!("{:<8} {}", constant.name(), constant.value().as_decimal(30));
    }

    let r = math::random();
    println!("\nrandom fraction: {} ~ {}", r, r.as_decimal(10));

    Ok(())
}
