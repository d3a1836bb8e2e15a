/// Build the summary prompt for a video transcript.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Please provide a concise summary of the following YouTube video transcript. \
Focus on the main points and key takeaways. Format the output with a title in bold, \
followed by bullet points for the summary.\n\
\n\
Transcript:\n\
\"\"\"{transcript}\"\"\""
    )
}
