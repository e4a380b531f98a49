mod checkout_branch;
mod checkout_commit_detaches_head;
mod checkout_unknown_target_fails;
