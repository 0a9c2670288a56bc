//! Fixed prompt text and request defaults

/// Model used when the request names none
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Temperature used when the request omits one
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output token ceiling for every upstream call
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// System instruction used when the request omits one or sends it empty
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that formats text into clear, structured content. \
     Create organized sections with headings, bullet points, and numbered lists as appropriate.";

/// Marker preceding the user's content in the wrapper prompt
pub const CONTENT_MARKER: &str = "Original content:";

/// Wrap raw editor content in the formatting instructions
pub fn formatting_prompt(content: &str) -> String {
    format!(
        "Format the following content according to best practices.\n\
         Create organized sections with clear headings, bullet points, and numbered lists as appropriate.\n\
         Return the formatted content as HTML that can be directly inserted into a document.\n\
         Do not include any introductory text like \"Here is the formatted content:\". Just return the HTML.\n\
         \n\
         {CONTENT_MARKER}\n\
         {content}"
    )
}
