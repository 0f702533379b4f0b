//! Fixed demo content shown when the backend has nothing to offer.

use chrono::{DateTime, Duration, Utc};
use shared_types::{CommunityAnswer, ModelAnswer, QuestionRecord, QuestionStatus, User};

pub fn users() -> Vec<User> {
    [("user1", "TechGuru", 1), ("user2", "CodeMaster", 2), ("user3", "DevWizard", 3)]
        .into_iter()
        .map(|(id, username, img)| User {
            id: id.to_string(),
            username: username.to_string(),
            avatar: Some(format!("https://i.pravatar.cc/150?img={}", img)),
        })
        .collect()
}

pub fn find_user(id: &str) -> Option<User> {
    users().into_iter().find(|u| u.id == id)
}

fn question(
    id: &str,
    text: &str,
    timestamp: DateTime<Utc>,
    confidence: f64,
    answer: &str,
    tags: &[&str],
) -> QuestionRecord {
    let response = ModelAnswer {
        confidence,
        answer: answer.to_string(),
        escalate_to_human: confidence < 0.7,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    QuestionRecord {
        id: id.to_string(),
        question: text.to_string(),
        timestamp,
        status: response.status(),
        response: Some(response),
    }
}

/// Five sample questions, timestamps relative to `now`
pub fn questions(now: DateTime<Utc>) -> Vec<QuestionRecord> {
    vec![
        question(
            "q1",
            "Why does React re-render components when using useState?",
            now - Duration::hours(1),
            0.95,
            "React re-renders components when state changes to ensure the UI reflects the current application state. This is a core part of React's design philosophy.",
            &["react", "javascript", "hooks"],
        ),
        question(
            "q2",
            "What's the difference between useMemo and useCallback in React?",
            now - Duration::hours(2),
            0.92,
            "useMemo caches the result of a computation, while useCallback caches a function definition. Both are used for performance optimization.",
            &["react", "hooks", "performance"],
        ),
        question(
            "q3",
            "My Docker container keeps crashing with OOMKilled error. How can I debug this?",
            now - Duration::days(1),
            0.45,
            "This appears to be a memory-related issue in your Docker container. You might want to check for memory leaks or increase the container memory limit.",
            &["docker", "devops", "debugging"],
        ),
        question(
            "q4",
            "Best practices for implementing authentication in a Node.js/Express API?",
            now - Duration::days(2),
            0.65,
            "For Node.js/Express authentication, consider using JWT, OAuth, or Passport.js. Implement HTTPS, secure cookies, and proper password hashing.",
            &["node.js", "express", "authentication", "security"],
        ),
        question(
            "q5",
            "How to optimize database queries in a large-scale PostgreSQL application?",
            now - Duration::days(3),
            0.88,
            "For PostgreSQL optimization: use proper indexing, analyze query plans with EXPLAIN, optimize JOINs, use connection pooling, and consider query caching.",
            &["postgresql", "database", "performance"],
        ),
    ]
}

/// The two answers every community thread starts with
pub fn community_answers(question_id: &str, now: DateTime<Utc>) -> Vec<CommunityAnswer> {
    vec![
        CommunityAnswer {
            id: "a1".to_string(),
            question_id: question_id.to_string(),
            user_id: "user2".to_string(),
            answer: "This is a great question! To add a bit more detail to the AI answer - React's component re-rendering is essential but can sometimes lead to performance issues if not managed properly. If you find your app is re-rendering too frequently, consider using:\n\n- `React.memo` for functional components\n- `shouldComponentUpdate` for class components\n- `useMemo` and `useCallback` hooks to memoize values and functions\n\nHope this helps!".to_string(),
            timestamp: (now - Duration::minutes(40)).to_rfc3339(),
            votes: 7,
            is_accepted: true,
        },
        CommunityAnswer {
            id: "a2".to_string(),
            question_id: question_id.to_string(),
            user_id: "user3".to_string(),
            answer: "One thing that's important to note is that calling a setState function doesn't immediately change the state value. State updates may be batched for performance reasons. This explains why reading state right after calling setState can give you the \"old\" value.\n\nAlso, if you need to update state based on the previous state, always use the functional form of setState:\n\n```jsx\nsetCount(prevCount => prevCount + 1);\n```\n\nThis ensures you're working with the most current state value.".to_string(),
            timestamp: (now - Duration::minutes(20)).to_rfc3339(),
            votes: 3,
            is_accepted: false,
        },
    ]
}
