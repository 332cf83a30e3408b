use regex::Regex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ContentRetryCondition {
    pub pattern: String,
    pub is_regex: bool,
}

/// A response matching any condition is considered transient and retried.
#[derive(Debug, Clone)]
pub enum RetryCondition {
    StatusCode(u16),
    ServerError,
    Content(ContentRetryCondition),
}

#[derive(Debug, Clone, Copy)]
pub enum BackoffPolicy {
    Constant,
    Linear,
    Exponential { factor: f32 },
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_policy: BackoffPolicy,
    pub conditions: Vec<RetryCondition>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            backoff_policy: BackoffPolicy::Exponential { factor: 2.0 },
            conditions: vec![
                RetryCondition::StatusCode(429),
                RetryCondition::ServerError,
                RetryCondition::Content(ContentRetryCondition {
                    pattern: "(?i)rate limit|too many requests".to_string(),
                    is_regex: true,
                }),
            ],
        }
    }
}

impl RetryConfig {
    pub fn should_retry(&self, status: u16, content: &str) -> bool {
        self.conditions.iter().any(|condition| match condition {
            RetryCondition::StatusCode(code) => *code == status,
            RetryCondition::ServerError => (500..600).contains(&status),
            RetryCondition::Content(content_condition) => {
                check_content_condition(content_condition, content)
            }
        })
    }

    pub fn calculate_delay(&self, attempt: usize) -> Duration {
        if attempt == 0 {
            return self.initial_delay;
        }

        let delay = match self.backoff_policy {
            BackoffPolicy::Constant => self.initial_delay,
            BackoffPolicy::Linear => self.initial_delay.mul_f32(attempt as f32),
            BackoffPolicy::Exponential { factor } => {
                self.initial_delay.mul_f32(factor.powi(attempt as i32))
            }
        };

        std::cmp::min(delay, self.max_delay)
    }
}

fn check_content_condition(condition: &ContentRetryCondition, content: &str) -> bool {
    if condition.is_regex {
        Regex::new(&condition.pattern)
            .map(|re| re.is_match(content))
            .unwrap_or(false)
    } else {
        content
            .to_lowercase()
            .contains(&condition.pattern.to_lowercase())
    }
}
