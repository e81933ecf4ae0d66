mod elicitation;
mod report;
