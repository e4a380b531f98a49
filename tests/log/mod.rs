mod log_medium_format;
mod log_merge_commit;
mod log_oneline;
mod log_without_commits_fails;
