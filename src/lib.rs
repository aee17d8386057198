// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categorize;
pub mod cli;
pub mod commands;
pub mod decode;
pub mod models;
pub mod persist;
pub mod report;
pub mod store;
pub mod utils;
