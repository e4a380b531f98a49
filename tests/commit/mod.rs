mod commit_clears_the_index;
mod first_commit_is_a_root_commit;
mod same_history_gives_same_commit_ids;
