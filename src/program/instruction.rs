use std::fmt;
use std::str::FromStr;

use anyhow::{bail, ensure, Context};
use num_bigint::BigInt;
use num_traits::Num;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Push(BigInt),
    Pop,
    Peek,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[rustfmt::skip]
        let () = match self {
            Instruction::Push(v) => write!(f, "push {}", v)?,
            Instruction::Pop     => write!(f, "pop")?,
            Instruction::Peek    => write!(f, "peek")?,
        };

        Ok(())
    }
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut words = s.split_whitespace();

        let keyword = match words.next() {
            Some(w) => w.to_ascii_lowercase(),
            None => bail!("empty instruction"),
        };

        let instruction = match keyword.as_str() {
            "push" => {
                let operand = words.next().context("push needs a value")?;
                Instruction::Push(parse_integer(operand)?)
            }
            "pop" => Instruction::Pop,
            "peek" => Instruction::Peek,
            other => bail!("unknown instruction {:?}", other),
        };

        ensure!(
            words.next().is_none(),
            "trailing input after {:?}",
            keyword
        );

        Ok(instruction)
    }
}

/// Decimal, or hexadecimal with a `0x` prefix. Either may carry a sign.
fn parse_integer(s: &str) -> anyhow::Result<BigInt> {
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    ensure!(
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        "invalid integer {:?}",
        s
    );

    let magnitude = BigInt::from_str_radix(digits, radix)
        .with_context(|| format!("invalid integer {:?}", s))?;

    Ok(if negative { -magnitude } else { magnitude })
}
