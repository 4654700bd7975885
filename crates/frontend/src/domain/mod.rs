pub mod a001_book_order;
