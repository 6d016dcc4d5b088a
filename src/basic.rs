use crate::Classification;
use num_traits::PrimInt;
use std::{
    borrow::Cow,
    io::{self, Write},
};

/// Label for multiples of 3
pub const FOO: &str = "Foo";

/// Label for multiples of 5
pub const BAR: &str = "Bar";

/// Label for multiples of both 3 and 5
pub const FOOBAR: &str = "FooBar";

/// Inclusive end of the hard-coded range, which starts at 1
pub const UPPER_BOUND: u64 = 100;

/// Classify `n` by divisibility by 3 and 5
///
/// Works with any primitive integer counter. Multiples of both divisors are
/// checked first so that they get the combined label.
pub fn classify<N: PrimInt>(n: N) -> Classification<'static, N> {
    let one = N::one();
    let three = one + one + one;
    let five = three + one + one;

    let label = match (n % three == N::zero(), n % five == N::zero()) {
        (true, true) => FOOBAR,
        (true, false) => FOO,
        (false, true) => BAR,
        (false, false) => return Classification::Number(n),
    };
    Classification::Label(Cow::Borrowed(label))
}

/// Write the classification of every integer from 1 to 100, one per line
pub fn write_to(out: &mut impl Write) -> io::Result<()> {
    for n in 1..=UPPER_BOUND {
        writeln!(out, "{}", classify(n))?;
    }
    Ok(())
}
