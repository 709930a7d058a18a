use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::Path;
use std::str::FromStr;

use crate::selector::ProblemInstance;

/// Outcome of one test case from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub index: usize,
    pub n: usize,
    pub k: usize,
    pub count: usize,
}

/// Parses the batch format: a test-case count T, then per test case `n k`
/// followed by n lists, each a length and that many unsigned values. All
/// tokens are whitespace separated; line structure carries no meaning.
pub fn parse_batch(input: &str) -> io::Result<Vec<ProblemInstance>> {
    let mut tokens = input.split_whitespace();
    let cases: usize = next_token(&mut tokens, "test case count")?;
    let mut instances = Vec::with_capacity(cases);
    for _ in 0..cases {
        let n: usize = next_token(&mut tokens, "list count")?;
        let k: usize = next_token(&mut tokens, "target k")?;
        let mut lists = Vec::with_capacity(n);
        for _ in 0..n {
            let len: usize = next_token(&mut tokens, "list length")?;
            let mut list = Vec::with_capacity(len);
            for _ in 0..len {
                list.push(next_token(&mut tokens, "list value")?);
            }
            lists.push(list);
        }
        instances.push(ProblemInstance::new(lists, k));
    }
    Ok(instances)
}

pub fn read_batch_file(path: &Path) -> io::Result<Vec<ProblemInstance>> {
    let contents = fs::read_to_string(path)?;
    parse_batch(&contents)
}

/// Reads a batch file and solves every test case in order.
pub fn run_batch(path: &Path) -> io::Result<Vec<CaseResult>> {
    let instances = read_batch_file(path)?;
    let mut results = Vec::with_capacity(instances.len());
    for (index, instance) in instances.into_iter().enumerate() {
        let n = instance.n;
        let k = instance.k;
        let count = instance.solve()?;
        results.push(CaseResult {
            index: index + 1,
            n,
            k,
            count,
        });
    }
    Ok(results)
}

fn next_token<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> io::Result<T> {
    let token = tokens.next().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("unexpected end of input while reading {}", what),
        )
    })?;
    token.parse().map_err(|_| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid {}: {:?}", what, token),
        )
    })
}
