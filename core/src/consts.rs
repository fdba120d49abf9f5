/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const ACTIONS_COLLECTION: &str = "actions";
pub const DEMANDES_COLLECTION: &str = "demandes";
