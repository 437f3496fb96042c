//! Terminal rendering for the binary. Nothing here touches the stores.

mod print;

pub(crate) use print::{
    print_analytics, print_board, print_config, print_documents, print_full_document,
    print_jobs, print_messages, print_paging,
};
