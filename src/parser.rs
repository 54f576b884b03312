use crate::error::{Error, Result};
use crate::BipartiteGraph;
use nom::{
    character::complete::{digit1, multispace0},
    combinator::map_res,
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};
use std::path::Path;

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse an integer token, skipping any leading whitespace (including
/// newlines, so the grammar does not care how edges are split across lines)
fn token(input: &str) -> IResult<&str, usize> {
    preceded(multispace0, parse_usize)(input)
}

/// Parse one edge as a pair of consecutive integer tokens
fn parse_edge(input: &str) -> IResult<&str, (usize, usize)> {
    pair(token, token)(input)
}

/// Parse a complete instance: an `n m` header, then edge pairs until the end
/// of input.
///
/// The edge list is read to exhaustion rather than trusting the announced
/// count `m`; a mismatch is logged but not fatal. Anything left over after
/// the last complete pair, including a dangling single integer, rejects the
/// whole input.
pub fn parse_instance(input: &str) -> Result<BipartiteGraph> {
    let (rest, (n, m)) = pair(token, token)(input)
        .map_err(|_| Error::malformed("expected header with vertex and edge counts"))?;

    let (rest, edges) = many0(parse_edge)(rest)
        .map_err(|e| Error::malformed(format!("unreadable edge list: {}", e)))?;

    let rest = rest.trim_start();
    if !rest.is_empty() {
        let offending = rest.split_whitespace().next().unwrap_or(rest);
        return Err(Error::malformed(format!(
            "trailing input after edge list: {:?}",
            offending
        )));
    }

    if edges.len() != m {
        log::warn!(
            "header announced {} edges but the input contains {}",
            m,
            edges.len()
        );
    }

    BipartiteGraph::new(n, &edges)
}

/// Parse an instance file from disk
pub fn parse_input_file(path: &Path) -> Result<BipartiteGraph> {
    let content = std::fs::read_to_string(path)?;
    parse_instance(&content)
}
