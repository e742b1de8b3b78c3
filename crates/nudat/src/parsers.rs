//! Set of useful parser combinators

// internal modules
use crate::nuclide::NuclideName;
use nuchart_utils::StringExt;

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{alpha1, digit1, one_of};
use nom::combinator::{all_consuming, map};
use nom::multi::many0_count;
use nom::sequence::{separated_pair, tuple};
use nom::{self, IResult};

/// Parse free text into a normalised nuclide name
///
/// Can be either order:
///     - Element first Th232, Th-232, th_232, TH|232
///     - Mass first 232Th, 232-TH, 232_th
///
/// Any number of separators are allowed between the two parts but nothing
/// else, and the whole input must be consumed. Whitespace should be removed
/// beforehand.
///
/// The neutron symbol is special in that 'n' and 'N' are kept as written,
/// everything else is normalised to the usual element case convention.
pub(crate) fn nuclide_name(i: &str) -> IResult<&str, NuclideName> {
    let (i, (element, digits)) = all_consuming(alt((element_first, mass_first)))(i)?;

    Ok((
        i,
        NuclideName {
            element: normalise_element(element),
            mass_number: strip_zeros(digits),
        },
    ))
}

/// `<element><separators><digits>`
fn element_first(i: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(alpha1, separators, digit1)(i)
}

/// `<digits><separators><element>`, returned in element-first order
fn mass_first(i: &str) -> IResult<&str, (&str, &str)> {
    map(tuple((digit1, separators, alpha1)), |(digits, _, element)| {
        (element, digits)
    })(i)
}

/// List of possible separators people may use, possibly none
fn separators(i: &str) -> IResult<&str, usize> {
    many0_count(one_of("-_|"))(i)
}

/// Keep the neutron as is, title case for everything else
fn normalise_element(element: &str) -> String {
    match element {
        "n" | "N" => element.to_string(),
        _ => element.title_case(),
    }
}

/// Drop leading zeros from the mass number
fn strip_zeros(digits: &str) -> String {
    digits.trim_start_matches('0').to_string()
}
