use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use realnum::{Decimal128, RealResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            'x' | '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn apply(self, lhs: Decimal128, rhs: Decimal128) -> RealResult<Decimal128> {
        Ok(match self {
            Op::Add => lhs.checked_add(rhs)?,
            Op::Sub => lhs.checked_sub(rhs)?,
            Op::Mul => lhs.checked_mul(rhs)?,
            Op::Div => lhs.checked_div(rhs)?,
        })
    }
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Op::from_char), chars.next()) {
            (Some(op), None) => Ok(op),
            _ => bail!("Unknown operator '{s}', expected one of + - x * /"),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// A single decimal or a binary operation on two decimals.
#[derive(Debug, PartialEq, Eq)]
pub enum Expr<'a> {
    Value(&'a str),
    Binary(&'a str, Op, &'a str),
}

impl<'a> Expr<'a> {
    /// Splits `LHS<op>RHS` at the first operator that follows a digit or a
    /// dot, so leading minus signs stay with their operand.
    pub fn parse(input: &'a str) -> Self {
        let split = input.char_indices().skip(1).find_map(|(i, c)| {
            let op = Op::from_char(c)?;
            input[..i]
                .ends_with(|p: char| p.is_ascii_digit() || p == '.')
                .then_some((i, c, op))
        });
        match split {
            Some((i, c, op)) => Expr::Binary(&input[..i], op, &input[i + c.len_utf8()..]),
            None => Expr::Value(input),
        }
    }

    pub fn evaluate(&self) -> RealResult<Decimal128> {
        match *self {
            Expr::Value(value) => Decimal128::from_str(value),
            Expr::Binary(lhs, op, rhs) => {
                let lhs = Decimal128::from_str(lhs)?;
                let rhs = Decimal128::from_str(rhs)?;
                debug!("{lhs:?} {op} {rhs:?}");
                op.apply(lhs, rhs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realnum::RealError;

    #[test]
    fn op_from_str_works() {
        assert_eq!("+".parse::<Op>().unwrap(), Op::Add);
        assert_eq!("-".parse::<Op>().unwrap(), Op::Sub);
        assert_eq!("x".parse::<Op>().unwrap(), Op::Mul);
        assert_eq!("*".parse::<Op>().unwrap(), Op::Mul);
        assert_eq!("/".parse::<Op>().unwrap(), Op::Div);

        let err = "%".parse::<Op>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown operator '%', expected one of + - x * /"
        );
        assert!("++".parse::<Op>().is_err());
        assert!("".parse::<Op>().is_err());
    }

    #[test]
    fn expr_parse_works() {
        assert_eq!(Expr::parse("1.5"), Expr::Value("1.5"));
        assert_eq!(Expr::parse("-1.5"), Expr::Value("-1.5"));
        assert_eq!(Expr::parse("1+2"), Expr::Binary("1", Op::Add, "2"));
        assert_eq!(Expr::parse("-1.5*-2"), Expr::Binary("-1.5", Op::Mul, "-2"));
        assert_eq!(Expr::parse("7.-3"), Expr::Binary("7.", Op::Sub, "3"));
        assert_eq!(Expr::parse("10x3"), Expr::Binary("10", Op::Mul, "3"));
        assert_eq!(Expr::parse("1/0"), Expr::Binary("1", Op::Div, "0"));
    }

    #[test]
    fn expr_evaluate_works() {
        assert_eq!(
            Expr::parse("62.83185307/20").evaluate().unwrap().to_string(),
            "3.1415926535"
        );
        assert_eq!(
            Expr::parse("-1.5*-2").evaluate().unwrap(),
            Decimal128::from(3u64)
        );
        assert_eq!(Expr::parse("1/0").evaluate(), Err(RealError::divide_by_zero()));
        assert!(matches!(
            Expr::parse("1.2.3").evaluate(),
            Err(RealError::InvalidFormat { .. })
        ));
    }
}
