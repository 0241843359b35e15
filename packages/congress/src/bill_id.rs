//! Bill identifier parsing.
//!
//! The generative lookup answers with up to three identifiers separated by
//! `|`, each in `type.number.congress` form (e.g. `hr.3076.117|s.1.118`).
//! Parsing is purely syntactic: parts are not checked to be numeric and the
//! order of segments is kept as the relevance ranking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CongressError, Result};

/// Maximum number of bill references kept from a lookup response.
pub const MAX_LOOKUP_RESULTS: usize = 3;

/// Separator between bill identifiers in a lookup response.
const SEGMENT_SEPARATOR: char = '|';

/// Separator between the parts of a single bill identifier.
const PART_SEPARATOR: char = '.';

/// A (type, number, congress) triple identifying a piece of legislation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillReference {
    /// Chamber code, e.g. `hr` or `s`.
    pub bill_type: String,
    pub bill_number: String,
    /// Congress session number, e.g. `117`.
    pub congress: String,
}

impl BillReference {
    /// Parse a `type.number.congress` token.
    ///
    /// # Examples
    /// ```
    /// use lawchat_congress::BillReference;
    ///
    /// let bill = BillReference::parse("hr.3076.117").unwrap();
    /// assert_eq!(bill.bill_type, "hr");
    /// assert_eq!(bill.to_string(), "hr.3076.117");
    /// assert!(BillReference::parse("hr.3076").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split(PART_SEPARATOR).collect();
        let [bill_type, bill_number, congress] = parts.as_slice() else {
            return Err(CongressError::InvalidBillId(token.to_string()));
        };

        if bill_type.is_empty() || bill_number.is_empty() || congress.is_empty() {
            return Err(CongressError::InvalidBillId(token.to_string()));
        }

        Ok(Self {
            bill_type: (*bill_type).to_string(),
            bill_number: (*bill_number).to_string(),
            congress: (*congress).to_string(),
        })
    }
}

impl FromStr for BillReference {
    type Err = CongressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BillReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{PART_SEPARATOR}{}{PART_SEPARATOR}{}",
            self.bill_type, self.bill_number, self.congress
        )
    }
}

/// Ranked bill references from a single lookup, most relevant first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BillLookup {
    bills: Vec<BillReference>,
}

impl BillLookup {
    pub fn bills(&self) -> &[BillReference] {
        &self.bills
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    /// The highest-ranked reference, if any.
    pub fn primary(&self) -> Option<&BillReference> {
        self.bills.first()
    }

    pub fn into_inner(self) -> Vec<BillReference> {
        self.bills
    }
}

impl fmt::Display for BillLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bill) in self.bills.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEGMENT_SEPARATOR}")?;
            }
            write!(f, "{bill}")?;
        }
        Ok(())
    }
}

/// Parse a raw lookup response into at most three bill references.
///
/// Segments beyond the third are dropped without inspection. Any kept
/// segment that is not a valid `type.number.congress` token fails the
/// whole parse.
pub fn parse_bill_lookup(raw: &str) -> Result<BillLookup> {
    let bills = raw
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .take(MAX_LOOKUP_RESULTS)
        .map(BillReference::parse)
        .collect::<Result<Vec<_>>>()?;

    Ok(BillLookup { bills })
}
