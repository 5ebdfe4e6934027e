//! Prompt builders for the external text-generation collaborator
//!
//! Two pure string-construction functions, one per ACU stage. The core never
//! talks to the collaborator itself: the caller sends the prompt, receives a
//! single candidate string, and feeds it to the validator. The companion
//! length predicate is likewise advisory; chunking or rejecting oversized
//! input is the caller's responsibility.

use crate::api::Language;

use super::acu::strip_speaker_prefix;

/// Default input size ceiling in characters
pub const MAX_TEXT_CHARS: usize = 50_000;

/// Whether a text exceeds the default length ceiling
pub fn text_exceeds_limit(text: &str) -> bool {
    text_exceeds_limit_at(text, MAX_TEXT_CHARS)
}

/// Whether a text exceeds an explicit length ceiling
pub fn text_exceeds_limit_at(text: &str, max_chars: usize) -> bool {
    text.chars().count() > max_chars
}

/// Stage-1 prompt: ask for over-segmentation with `*` at semantic boundaries
///
/// A leading speaker prefix is removed before the sentence is embedded so
/// the collaborator never sees (or segments) the dialogue label.
pub fn build_oversegment_prompt(language: Language, sentence: &str) -> String {
    let content = strip_speaker_prefix(sentence);

    if language == Language::English {
        return format!(
            r#"Language: English ({code})
Original Sentence: "{content}"

Please insert asterisks * at semantic boundaries within the sentence to create meaningful Learning Units (ACUs).
Requirements:
1. Divide strictly into semantic chunks (phrases, clauses, idioms).
2. DO NOT split strictly by single words unless the word stands alone meaningfully.
3. Keep fixed collocations, phrasal verbs, and idioms together (e.g., "look for", "take care of", "in front of").
4. Keep grammatical structures together (e.g., "have been waiting", "would like to").
5. Punctuation can be separate or attached to the adjacent phrase.
6. Asterisks * must ONLY be inserted BETWEEN characters (usually spaces). DO NOT modify original text.
7. NO continuous asterisks **.
8. Output ONLY the marked sentence.

Examples:
Original: "I would like to go to the supermarket with my friend."
Output: "*I would like* to go *to the supermarket* with my friend*."

Original: "She has been working on this project for two years."
Output: "*She has been working* on this project *for two years*.""#,
            code = language.code(),
        );
    }

    format!(
        r#"语言: {code}
原句: "{content}"

请在原句中插入星号*作为语义边界，直接产生最终的分块结果。要求：
1. 必须进行细分，不能整句不划分
2. 按词或短语划分，如"这个商品"、"价格是多少"、"98元"、"现在有活动"
3. 标点符号可以单独成块，也可以与相邻词汇组合
4. 星号只能插在字符之间，不能插在开头或结尾
5. 不能出现连续的星号**
6. 直接产生语义完整的最小可理解单元，不需要后续合并
7. 输出格式：直接输出插星号后的句子，不要其他内容

示例：
原句: "这个商品的价格是多少？"
输出: "*这个商品的价格*是*多少*？"

原句: "标价是98元，现在有活动。"
输出: "*标价是98元*，*现在有活动*。""#,
        code = language.code(),
    )
}

/// Stage-2 prompt: ask for removal of unnecessary stars, keeping only
/// minimally-sized, semantically complete units
pub fn build_refine_prompt(marked_sentence: &str) -> String {
    format!(
        r#"过度细分版: "{marked_sentence}"

请移除不必要的星号，只保留最小可理解单元边界。要求：
1. 合并过度细分的部分，如"这*个*商*品"合并为"这个商品"
2. 保持有意义的语义边界，如"这个商品*的*价格"
3. 对话格式"A:"、"B:"保持完整，不要对标识符进行细分
4. 数字、标点符号保持完整
5. 如果整句没有星号，需要添加合理的语义边界
6. 输出格式：直接输出调整后的句子，不要其他内容"#
    )
}
