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

use std::thread;

use anyhow::Result;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, Request};
use oauth_sign_core::time::parse_unix_timestamp;
use oauth_sign_core::{Context, ErrorKind, OsEnv, Signer, SigningRequest};
use oauth_sign_v1::{Config, RequestSigner, StaticNonce};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::{config, init_logger, post_request, request_signer, TIMESTAMP};

/// Published example of the Twitter API documentation.
#[test]
fn test_sign_parts_with_twitter_example() -> Result<()> {
    init_logger();

    let config = Config {
        consumer_key: Some("xvz1evFS4wEEPTGEFPHBog".to_string()),
        consumer_secret: Some("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string()),
        token: Some("370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string()),
        token_secret: Some("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string()),
        ..Default::default()
    };
    let builder = RequestSigner::new(config)?
        .with_nonce_generator(StaticNonce::new("kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"))
        .with_time(parse_unix_timestamp("1318622958")?);
    let signer = Signer::new(Context::new(), builder);

    let (mut parts, _) = Request::post(
        "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
    )
    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
    .body(())?
    .into_parts();
    let body = b"status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21";

    signer.sign_parts(&mut parts, Some(body.as_slice()))?;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str()?,
        concat!(
            r#"OAuth oauth_consumer_key="xvz1evFS4wEEPTGEFPHBog", "#,
            r#"oauth_nonce="kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg", "#,
            r#"oauth_signature="hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D", "#,
            r#"oauth_signature_method="HMAC-SHA1", "#,
            r#"oauth_timestamp="1318622958", "#,
            r#"oauth_token="370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb", "#,
            r#"oauth_version="1.0""#,
        )
    );
    assert_eq!(
        parts.uri,
        "https://api.twitter.com/1.1/statuses/update.json?include_entities=true"
    );
    Ok(())
}

#[test_case(|r: &mut SigningRequest| { r.method = Method::PUT }; "method")]
#[test_case(|r: &mut SigningRequest| { r.path = "/other".to_string() }; "path")]
#[test_case(|r: &mut SigningRequest| r.query.set("a", "B"); "query value")]
#[test_case(|r: &mut SigningRequest| r.query.add("z", "1"); "extra query")]
#[test_case(|r: &mut SigningRequest| r.body.set("e", "g"); "body value")]
fn test_signature_depends_on_request(change: fn(&mut SigningRequest)) {
    let s = request_signer(config());

    let mut changed = post_request();
    change(&mut changed);

    let original = s
        .signature(&post_request(), Some(TIMESTAMP))
        .expect("signing must succeed");
    let changed = s
        .signature(&changed, Some(TIMESTAMP))
        .expect("signing must succeed");
    assert_ne!(original, changed);
}

#[test]
fn test_signature_ignores_fragment_and_parameter_order() -> Result<()> {
    let s = request_signer(config());

    let reordered = SigningRequest::new(Method::POST, "http://www.test.com/path?c=d&a=b#top")?
        .with_form_body(b"e=f");

    assert_eq!(
        s.signature(&post_request(), Some(TIMESTAMP))?,
        s.signature(&reordered, Some(TIMESTAMP))?
    );
    Ok(())
}

#[test]
fn test_invalid_timestamp_is_rejected() {
    let signer = Signer::new(Context::new(), request_signer(config()));
    let mut req = post_request();

    let err = signer.sign(&mut req, Some("12:00")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(req.headers.get(AUTHORIZATION).is_none());
}

#[test]
fn test_sign_from_many_threads() -> Result<()> {
    let signer = Signer::new(Context::new(), RequestSigner::new(config())?);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let signer = signer.clone();
            thread::spawn(move || -> oauth_sign_core::Result<String> {
                let mut req = post_request();
                req.query.set("worker", i);
                signer.sign(&mut req, None)?;
                Ok(req.headers[AUTHORIZATION].to_str()?.to_string())
            })
        })
        .collect();

    let mut headers = Vec::new();
    for handle in handles {
        let header = handle.join().expect("thread must not panic")?;
        assert!(header.starts_with("OAuth oauth_consumer_key=\"foo\", "));
        headers.push(header);
    }
    headers.sort();
    headers.dedup();
    assert_eq!(headers.len(), 8);
    Ok(())
}

#[test]
fn test_config_from_os_env() {
    temp_env::with_vars(
        [
            ("OAUTH_CONSUMER_KEY", Some("env-key")),
            ("OAUTH_CONSUMER_SECRET", Some("env-secret")),
            ("OAUTH_TOKEN", None),
            ("OAUTH_TOKEN_SECRET", None),
            ("OAUTH_SIGNATURE_METHOD", None),
            ("OAUTH_VERSION", Some("1.0a")),
        ],
        || {
            let ctx = Context::new().with_env(OsEnv);
            let s = RequestSigner::new(Config::default().from_env(&ctx))
                .expect("config from env must be valid");

            assert_eq!(s.credential().consumer_key, "env-key");
            assert_eq!(s.credential().token, "");
            assert_eq!(s.signature_method(), "HMAC-SHA1");
            assert_eq!(s.version(), "1.0a");
        },
    );
}

#[test]
fn test_config_from_empty_env_is_invalid() {
    temp_env::with_vars_unset(["OAUTH_CONSUMER_KEY", "OAUTH_CONSUMER_SECRET"], || {
        let ctx = Context::new().with_env(OsEnv);
        let err = RequestSigner::new(Config::default().from_env(&ctx)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    });
}
