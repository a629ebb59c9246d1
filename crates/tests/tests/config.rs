// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use figment::Jail;
use tally_config::load_config;
use tally_events::QuestionId;
use tally_tests::{poll_from_config, respondent, submit, tally};

#[test]
fn test_poll_from_yaml_catalog() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_CHAIN_ID", "11155111");
        jail.create_file(
            "tally.config.yaml",
            r#"
poll_address: "0x5Cb1cb45f04ef0350Bae8eF2EDA4A551Fe8b6D34"
questions:
  - theme: "Tooling"
    prompt: "Which language?"
    options: ["Rust", "Solidity"]
  - prompt: "Which chain?"
    options: ["Sepolia", "Local", "Other", "None"]
"#,
        )?;

        let config = load_config(None).map_err(|e| e.to_string())?;
        let mut poll = poll_from_config(&config, 1).map_err(|e| e.to_string())?;

        assert_eq!(poll.get_question_count(), 2);
        assert_eq!(poll.confidential_protocol_id().map_err(|e| e.to_string())?, 11155111);
        assert_eq!(poll.poll_address(), config.poll_address);
        let q0 = poll
            .catalog()
            .question(QuestionId::new(0))
            .map_err(|e| e.to_string())?;
        assert_eq!(q0.label(0), Some("Rust"));

        submit(&mut poll, respondent(1), 1, 3).map_err(|e| e.to_string())?;
        assert_eq!(tally(&poll, 1).map_err(|e| e.to_string())?, vec![0, 0, 0, 1]);
        Ok(())
    });
}

#[test]
fn test_unsupported_chain_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("TALLY_CHAIN_ID", "1");

        let config = load_config(None).map_err(|e| e.to_string())?;
        let Err(err) = poll_from_config(&config, 0) else {
            return Err(String::from("chain 1 has no confidential protocol").into());
        };
        assert!(err.to_string().contains("chain 1"));
        Ok(())
    });
}
