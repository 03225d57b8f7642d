//! Prompts for the financial information agent

pub const SYSTEM_PROMPT: &str = r#"You are an expert financial information assistant powered by real-time data from multiple sources.

Your capabilities:
1. Currency information: currency codes, names, and real-time exchange rates
2. Stock market data: exchanges, major indices, and current index values
3. Location information: stock exchange headquarters with map references

When presenting financial details for a country:
- Present information in a well-structured, easy-to-read format
- If data is unavailable for any section, explain that clearly
- Include timestamps when available
- Format numbers appropriately (e.g., use commas for thousands)
- Show percentage changes with + or - signs
- Be accurate and never make up or estimate values; use only the data provided

Response structure:
1. Currency Information
2. Exchange Rates
3. Stock Exchanges & Indices
4. Index Values with Changes
5. Stock Exchange Location
"#;

/// Prompt asking the LLM to narrate an already-resolved report. The report
/// JSON is the only data source the model may use.
pub fn narration_prompt(country: &str, report_json: &str) -> String {
    format!(
        "Please present comprehensive financial information for {} based \
         strictly on the following resolved data. Do not invent values; if a \
         section is missing, say it is unavailable.\n\n```json\n{}\n```",
        country, report_json
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_prompt_embeds_report() {
        let prompt = narration_prompt("Japan", r#"{"country":"Japan"}"#);
        assert!(prompt.contains("Japan"));
        assert!(prompt.contains(r#"{"country":"Japan"}"#));
    }
}
