// ABOUTME: Dish string parser turning "2 x butter chicken, 1 x naan" into order lines
// ABOUTME: Malformed clauses are skipped and reported, never fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodprint Carbon Intelligence

use crate::models::OrderLine;
use crate::tables::table_key;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// `<count> x <dish>`; the separator may be `x`, `X`, `×`, or `*`
static CLAUSE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)\s*(?:[x×]\s+|[×*]\s*)(\S.*)$").ok());

/// Parsed lines plus the clauses that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Valid order lines in input order
    pub lines: Vec<OrderLine>,
    /// Trimmed text of each skipped clause
    pub skipped: Vec<String>,
}

/// Stateless dish string parser
#[derive(Debug, Clone, Copy, Default)]
pub struct DishStringParser;

impl DishStringParser {
    /// Create a parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Order lines of a dish string; malformed clauses are dropped
    #[must_use]
    pub fn parse(&self, dish_string: &str) -> Vec<OrderLine> {
        self.parse_with_report(dish_string).lines
    }

    /// Order lines together with the skipped clauses
    #[must_use]
    pub fn parse_with_report(&self, dish_string: &str) -> ParseReport {
        let mut report = ParseReport::default();
        for clause in dish_string.split(',').map(str::trim) {
            if clause.is_empty() {
                continue;
            }
            match parse_clause(clause) {
                Some(line) => report.lines.push(line),
                None => {
                    warn!(clause, "Skipping malformed order clause");
                    report.skipped.push(clause.to_owned());
                }
            }
        }
        report
    }
}

fn parse_clause(clause: &str) -> Option<OrderLine> {
    let captures = CLAUSE_PATTERN.as_ref()?.captures(clause)?;
    let count: u32 = captures.get(1)?.as_str().parse().ok()?;
    if count == 0 {
        return None;
    }
    let dish_name = table_key(captures.get(2)?.as_str());
    if dish_name.is_empty() {
        return None;
    }
    Some(OrderLine::new(count, dish_name))
}
