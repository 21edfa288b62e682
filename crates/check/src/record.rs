//! Check record and the raw form it is built from

use crate::Result;
use amount_words::Amount;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The fields printed on one check
///
/// Free-form strings are drawn verbatim, empty ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub date: String,
    pub payee: String,
    pub amount: Amount,
    pub memo: String,
    /// Bank name; the layout placeholder is drawn when absent or blank
    pub bank: Option<String>,
    pub routing_number: String,
    pub account_number: String,
    pub check_number: String,
    /// Signature image; a plain line is drawn when absent
    pub signature_path: Option<PathBuf>,
}

impl CheckRecord {
    /// Create a record with the required fields, everything else empty
    pub fn new(date: impl Into<String>, payee: impl Into<String>, amount: Amount) -> Self {
        Self {
            date: date.into(),
            payee: payee.into(),
            amount,
            memo: String::new(),
            bank: None,
            routing_number: String::new(),
            account_number: String::new(),
            check_number: String::new(),
            signature_path: None,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    /// Set routing, account and check numbers
    pub fn with_numbers(
        mut self,
        routing: impl Into<String>,
        account: impl Into<String>,
        check: impl Into<String>,
    ) -> Self {
        self.routing_number = routing.into();
        self.account_number = account.into();
        self.check_number = check.into();
        self
    }

    pub fn with_signature(mut self, path: impl Into<PathBuf>) -> Self {
        self.signature_path = Some(path.into());
        self
    }
}

/// Raw form values as typed by the user
///
/// Every field is optional so forms can be loaded from partial JSON files
/// and overlaid with [`CheckForm::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckForm {
    pub date: Option<String>,
    pub payee: Option<String>,
    /// Amount text, e.g. "123.45"
    pub amount: Option<String>,
    pub memo: Option<String>,
    pub bank: Option<String>,
    pub routing_number: Option<String>,
    pub account_number: Option<String>,
    pub check_number: Option<String>,
    pub signature_path: Option<String>,
}

impl CheckForm {
    /// Parse a form from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a form from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Overlay the non-empty fields of `other` on top of this form
    pub fn merge(self, other: CheckForm) -> CheckForm {
        fn pick(base: Option<String>, over: Option<String>) -> Option<String> {
            match over {
                Some(value) if !value.is_empty() => Some(value),
                _ => base,
            }
        }

        CheckForm {
            date: pick(self.date, other.date),
            payee: pick(self.payee, other.payee),
            amount: pick(self.amount, other.amount),
            memo: pick(self.memo, other.memo),
            bank: pick(self.bank, other.bank),
            routing_number: pick(self.routing_number, other.routing_number),
            account_number: pick(self.account_number, other.account_number),
            check_number: pick(self.check_number, other.check_number),
            signature_path: pick(self.signature_path, other.signature_path),
        }
    }

    /// Validate the amount and build a record
    ///
    /// Fails with [`crate::CheckError::InvalidAmount`] when the amount is
    /// missing, not a number or negative.
    pub fn into_record(self) -> Result<CheckRecord> {
        let amount: Amount = self.amount.unwrap_or_default().parse()?;

        let bank = self.bank.filter(|bank| !bank.trim().is_empty());
        let signature_path = self
            .signature_path
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(CheckRecord {
            date: self.date.unwrap_or_default(),
            payee: self.payee.unwrap_or_default(),
            amount,
            memo: self.memo.unwrap_or_default(),
            bank,
            routing_number: self.routing_number.unwrap_or_default(),
            account_number: self.account_number.unwrap_or_default(),
            check_number: self.check_number.unwrap_or_default(),
            signature_path,
        })
    }
}
