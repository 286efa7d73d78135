mod comment_tests;
mod health_tests;
mod reply_tests;
