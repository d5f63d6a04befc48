pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are a meticulous quiz designer. You turn study notes into multiple-choice quizzes and you always reply with structured JSON only.";

/// Placeholders: `{question_count}`, `{difficulty}`, `{notes}`.
pub const QUIZ_USER_PROMPT_TEMPLATE: &str = "Create a multiple-choice quiz from the study notes below.

### Instructions

1. Write exactly {question_count} questions at '{difficulty}' difficulty.
2. Every question has exactly 4 options and exactly one of them is the correct answer.
3. Make the wrong options relevant and plausible so the quiz is a real test of the notes.
4. Base every question on the notes only.

### Output contract

- Respond with a JSON array of objects and nothing else. No prose, no explanations, no markdown fences before or after the JSON.
- Each object has exactly these keys:
  - \"question\": string, the question text
  - \"options\": array of exactly 4 strings
  - \"answer\": string, identical to one of the 4 options
- If you must reply with a JSON object instead of an array, put the array under the key \"questions\".

### Notes

<<<NOTES
{notes}
NOTES>>>";
