//! Prompt construction for each oracle operation.
//!
//! Prompts are plain Japanese instructions; the reply formats they demand
//! are what the parse module interprets. Keeping them here, one function
//! per operation, is what lets the facade dispatch fallback by operation
//! tag instead of ever re-inspecting prompt text.

use std::str::FromStr;

use flagquiz_core::HintCategory;

/// Prompt asking the oracle whether a question has an acceptable shape.
pub fn validate_question(question: &str, country: &str) -> String {
    format!(
        "質問: \"{question}\"\n\
         対象国: {country}\n\
         \n\
         この質問が以下の条件を満たしているかYes/Noで回答してください：\n\
         1. Yes/No形式で回答できる質問である\n\
         2. 答えに直結しない質問である（例：「この国は○○ですか？」のような直接的な質問ではない）\n\
         \n\
         条件を満たしていればYes、満たしていなければNoで回答してください。"
    )
}

/// Prompt asking the oracle to answer a question with はい or いいえ.
pub fn answer_question(question: &str, country: &str) -> String {
    format!(
        "質問: \"{question}\"\n\
         対象国: {country}\n\
         \n\
         この国について上記の質問に日本語で「はい」または「いいえ」で回答してください。\n\
         回答は必ず「はい」または「いいえ」のみにしてください。"
    )
}

/// Prompt asking for a hint of the given category.
///
/// Unknown categories get a generic request rather than an error.
pub fn hint(category: &str, country: &str) -> String {
    match HintCategory::from_str(category) {
        Ok(HintCategory::StapleFood) => format!(
            "{country}の主食について、自然な日本語で短く教えてください。\
             国名や記号は使わず、「〜が主食です」のような形で回答してください。"
        ),
        Ok(HintCategory::Area) => format!(
            "{country}の面積を日本と比較して、自然な日本語で短く教えてください。\
             国名や記号は使わず、「日本の〜倍の面積です」のような形で回答してください。"
        ),
        Ok(HintCategory::Language) => format!(
            "{country}の公用語について、自然な日本語で短く教えてください。\
             国名や記号は使わず、「〜語が公用語です」のような形で回答してください。"
        ),
        Err(_) => "ヒント情報を提供してください。".to_string(),
    }
}

/// Prompt asking the oracle to pick a country in the three-line format the
/// parse module understands.
pub fn pick_country() -> String {
    "世界の国連加盟国から1つの国をランダムに選んで、以下の形式で回答してください：\n\
     \n\
     国名（英語）: [英語の正式名称]\n\
     国名（日本語）: [日本語の国名]\n\
     国旗URL: https://flagcdn.com/h240/[2文字の国コード].png\n\
     \n\
     例：\n\
     国名（英語）: Japan\n\
     国名（日本語）: 日本\n\
     国旗URL: https://flagcdn.com/h240/jp.png\n\
     \n\
     必ずこの形式で回答してください。"
        .to_string()
}

/// Prompt asking the oracle to grade a guess with 正解 or 不正解.
pub fn validate_guess(guess: &str, english: &str, localized: &str) -> String {
    format!(
        "ユーザーの回答: \"{guess}\"\n\
         正解の国（英語）: {english}\n\
         正解の国（日本語）: {localized}\n\
         \n\
         ユーザーの回答が正解かどうかを判定してください。\n\
         以下の場合は正解とみなしてください：\n\
         - 英語名の完全一致または略称（例：USA、UK）\n\
         - 日本語名の完全一致\n\
         - 一般的な別名（例：アメリカ合衆国→アメリカ）\n\
         \n\
         正解の場合は「正解」、不正解の場合は「不正解」のみ回答してください。"
    )
}
