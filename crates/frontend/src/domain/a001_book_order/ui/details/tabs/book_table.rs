use crate::app::use_config;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{PaginationControls, StatusChip};
use contracts::domain::a001_book_order::{BookAccent, BookItem, Seller};
use contracts::shared::format::format_currency;
use contracts::shared::pagination::TablePage;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

fn accent_class(accent: BookAccent) -> &'static str {
    match accent {
        BookAccent::Primary => "book-avatar book-avatar--primary",
        BookAccent::Default => "book-avatar",
    }
}

/// Books bought from one seller.
///
/// Pagination and selection belong to this table alone.
#[component]
pub fn BookTable(seller: Seller) -> impl IntoView {
    let config = use_config();
    let currency = StoredValue::new(config.order.currency);
    let locale = StoredValue::new(config.order.locale);

    let page = RwSignal::new(TablePage::new(config.table.default_page_size));
    let selected = RwSignal::new(HashSet::<u32>::new());

    let total = seller.book_count();
    let all_ids: Vec<u32> = seller.books.iter().map(|b| b.id).collect();
    let books = StoredValue::new(seller.books);

    let visible_books = move || books.with_value(|b| page.get().slice(b).to_vec());

    let on_select_all = Callback::new(move |check_all: bool| {
        selected.update(|sel| {
            if check_all {
                sel.extend(books.with_value(|b| b.iter().map(|book| book.id).collect::<Vec<_>>()));
            } else {
                sel.clear();
            }
        });
    });

    let on_toggle = Callback::new(move |(id, checked): (u32, bool)| {
        selected.update(|sel| {
            if checked {
                sel.insert(id);
            } else {
                sel.remove(&id);
            }
        });
    });

    view! {
        <div class="book-table">
            <div class="book-table__seller">
                <span class="avatar avatar--primary">{seller.avatar.clone()}</span>
                <h3 class="book-table__seller-name">{seller.name.clone()}</h3>
            </div>

            <div class="book-table__container" role="region" aria-label=format!("{} books table", seller.name)>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                ids=Signal::stored(all_ids)
                                selected=selected
                                on_change=on_select_all
                            />
                            <TableHeaderCell>"Book Info"</TableHeaderCell>
                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                            <TableHeaderCell>"Cost"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=visible_books
                            key=|book| book.id
                            children=move |book: BookItem| {
                                let cost = format_currency(
                                    book.cost as f64,
                                    &currency.get_value(),
                                    &locale.get_value(),
                                );
                                let initial = book.initial();
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=book.id
                                            selected=selected
                                            on_change=on_toggle
                                        />
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="book-info">
                                                    <span class=accent_class(book.accent)>{initial}</span>
                                                    <div>
                                                        <div class="book-info__title">{book.title.clone()}</div>
                                                        <div class="book-info__author">{format!("by {}", book.author)}</div>
                                                    </div>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{book.quantity}</TableCell>
                                        <TableCell>{cost}</TableCell>
                                        <TableCell>
                                            <StatusChip status=book.status />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <PaginationControls
                    state=page
                    total_count=Signal::stored(total)
                    on_page_change=Callback::new(move |p| page.update(|s| s.set_page(p)))
                    on_page_size_change=Callback::new(move |size| page.update(|s| s.set_page_size(size)))
                    page_size_options=config.table.page_size_options
                />
            </div>
        </div>
    }
}
