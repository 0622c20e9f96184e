use crate::Error;

/// Splits `"a b"`, `"a,b"` or `"a, b"` into two floats.
pub(crate) fn parse_pair(value: &str) -> Result<(f64, f64), Error> {
    let mut pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty());

    let (Some(first), Some(second), None) = (pieces.next(), pieces.next(), pieces.next()) else {
        return Err(Error::Parse(format!("Expected two values in {value:?}")));
    };

    let parse = |piece: &str| {
        piece
            .parse::<f64>()
            .map_err(|err| Error::Parse(format!("{piece:?} is not a number: {err}")))
    };

    Ok((parse(first)?, parse(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_separators() {
        for value in ["1.5 103.8", "1.5,103.8", "1.5, 103.8", "  1.5\t103.8  "] {
            assert_eq!(parse_pair(value).unwrap(), (1.5, 103.8));
        }
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(parse_pair("").is_err());
        assert!(parse_pair("1.5").is_err());
        assert!(parse_pair("1.5 103.8 12").is_err());
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(parse_pair("1.5 east"), Err(Error::Parse(_))));
    }
}
