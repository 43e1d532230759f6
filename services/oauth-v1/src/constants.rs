// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Env values used by oauth 1.0a config.
pub const OAUTH_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const OAUTH_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";
pub const OAUTH_TOKEN: &str = "OAUTH_TOKEN";
pub const OAUTH_TOKEN_SECRET: &str = "OAUTH_TOKEN_SECRET";
pub const OAUTH_SIGNATURE_METHOD: &str = "OAUTH_SIGNATURE_METHOD";
pub const OAUTH_VERSION: &str = "OAUTH_VERSION";

// Protocol parameters.
pub const PARAM_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const PARAM_NONCE: &str = "oauth_nonce";
pub const PARAM_SIGNATURE: &str = "oauth_signature";
pub const PARAM_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const PARAM_TIMESTAMP: &str = "oauth_timestamp";
pub const PARAM_TOKEN: &str = "oauth_token";
pub const PARAM_VERSION: &str = "oauth_version";

pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const DEFAULT_VERSION: &str = "1.0";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// AsciiSet for [RFC 3986 unreserved characters](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
