// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("No type with ID '{0}' in this vocabulary")]
    UnknownType(String),

    #[error(transparent)]
    Compile(#[from] rpg_schema_compiler::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Failed to serialize to JSON: {0}")]
    Json(#[from] serde_json::Error),
}
