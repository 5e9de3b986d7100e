/// Helper macro to build an input processor.
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::IStr,
            ) -> core::result::Result<Option<Self>, $crate::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(error) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::IStrError::custom(span, error))
                    }
                }
            }
        }
    };
}

/// Declare the entry point of a solution binary.
///
/// Names the input file under `inputs/`, the expected pair of answers and the
/// solver fn. The generated `main` parses CLI options, loads the input, runs
/// the solver or benches it, prints both parts and asserts the expected
/// values.
#[macro_export]
macro_rules! entry {
    (input = $file:literal, expect = $expect:expr, $solve:ident) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;
            let (input, path) = $crate::input!($file);

            match opts.mode {
                $crate::cli::Mode::Default => {
                    let mut cursor = input;

                    let value = match $solve(&mut cursor) {
                        Ok(value) => value,
                        Err(error) => {
                            return Err($crate::cli::error_context(path, input, error));
                        }
                    };

                    println!("part1: {}", value.0);
                    println!("part2: {}", value.1);

                    let expected = $expect;

                    assert!(
                        $crate::cli::OutputEq::output_eq(&value, &expected),
                        "{:?} (value) != {:?} (expected)",
                        value,
                        expected
                    );
                }
                $crate::cli::Mode::Bench => {
                    let mut b = $crate::cli::Bencher::new();
                    b.iter(&opts, Some($expect), || $solve(&mut input.clone()))?;
                }
            }

            Ok(())
        }
    };
}
