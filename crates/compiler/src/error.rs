// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use oxrdfio::{RdfFormat, RdfParseError};
use rpg_schema_iri::NamespaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read the vocabulary document: {0}")]
    Io(#[from] io::Error),

    #[error("The vocabulary document is not valid {format}: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Invalid vocabulary namespace: {0}")]
    InvalidNamespace(#[from] NamespaceError),
}

impl Error {
    pub(crate) fn from_parse_error(parse_err: RdfParseError, format: RdfFormat) -> Self {
        match parse_err {
            RdfParseError::Io(io_err) => Self::Io(io_err),
            RdfParseError::Syntax(syntax_err) => Self::Parse {
                format: format.name(),
                message: syntax_err.to_string(),
            },
        }
    }
}
