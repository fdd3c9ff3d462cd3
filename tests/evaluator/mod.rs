mod paging;
mod requests;
mod sorting;
