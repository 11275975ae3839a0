// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// A property as it applies to one class.
/// A property with multiple domains appears once per domain class,
/// as an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    /// Human readable names of the types values may have;
    /// never empty.
    pub expected_type: Vec<String>,
    pub description: String,
    /// `Some(true)` if asserted, otherwise `None`, never `Some(false)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// A compiled class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// The local name of the class IRI; unique within a graph
    pub id: String,
    pub name: String,
    pub description: String,
    /// The ID of the super-class, if it is part of the same vocabulary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub properties: Vec<PropertyDescriptor>,
    /// IDs of the direct sub-classes;
    /// `None` rather then empty, if there are none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_types: Option<Vec<String>>,
    pub icon: String,
}

impl TypeDescriptor {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn sub_types(&self) -> &[String] {
        self.sub_types.as_deref().unwrap_or_default()
    }
}
