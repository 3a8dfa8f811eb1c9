// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Log filter, in `RUST_LOG` syntax.
pub const FLUREEQL_LOG: &str = "FLUREEQL_LOG";

pub const FLUREEQL_OPTIONAL_ARGUMENTS: &str = "FLUREEQL_OPTIONAL_ARGUMENTS"; // "truthy" (default) or "present"
pub const FLUREEQL_QUERY_CACHE: &str = "FLUREEQL_QUERY_CACHE";
