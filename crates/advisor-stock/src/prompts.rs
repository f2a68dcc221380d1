//! Prompt construction for the advisor agent

/// Persona the reasoning model adopts for every analysis
pub fn advisor_system_prompt() -> String {
    "You are a hedge fund manager. You evaluate companies and give opinions \
     on whether their stock is worth buying. Be assertive in your judgement \
     and do not hedge with vague recommendations."
        .to_string()
}

/// The opening instruction for one analysis run
///
/// Names the symbol, the data the model should consider, and the language
/// the verdict should be written in.
pub fn verdict_instruction(symbol: &str, language: &str) -> String {
    format!(
        "Give me financial information on the {symbol} stock, considering its \
         financials, income statements, stock performance, and the company \
         overview. Then provide an opinion on whether the stock is a buy, \
         with your reasons. Write the full analysis in {language}."
    )
}

/// Resolve a short language tag to the name used in the instruction
///
/// Anything unrecognized is passed through unchanged, so full names like
/// "Spanish" also work as tags.
pub fn language_name(tag: &str) -> &str {
    match tag {
        "en" => "English",
        "ko" => "Korean",
        "ja" => "Japanese",
        "zh" => "Chinese",
        other => other,
    }
}
