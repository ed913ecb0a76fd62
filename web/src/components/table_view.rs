use dioxus::prelude::*;
// Tailwind classes inlined for table view.

/// Generic table: a header row, string cells, optional row selection.
///
/// `celled` draws borders between cells and `striped` alternates row
/// backgrounds.
#[component]
pub fn TableView(
    headers: Vec<String>,
    data: Vec<Vec<String>>,
    #[props(default = true)] celled: bool,
    #[props(default = true)] striped: bool,
    #[props(optional)] selected: Option<usize>,
    #[props(optional)] on_row_click: Option<EventHandler<usize>>,
) -> Element {
    let cell_border = if celled { "border-r border-gray-200" } else { "" };

    rsx! {
        div {
            class: "w-full overflow-x-auto border border-gray-200 rounded-lg",

            table {
                class: "w-full border-collapse table-auto",

                thead {
                    tr { class: "bg-gray-50 border-b border-gray-200",
                        for header in headers {
                            th { class: "px-4 py-2 text-left font-semibold text-gray-700 {cell_border}", {header} }
                        }
                    }
                }

                tbody {
                    for (row_idx, row) in data.iter().enumerate() {
                        tr {
                            key: "row-{row_idx}",
                            class: row_class(row_idx, striped, selected == Some(row_idx), on_row_click.is_some()),
                            onclick: move |_| {
                                if let Some(cb) = on_row_click {
                                    cb.call(row_idx);
                                }
                            },
                            for cell in row {
                                td { class: "px-4 py-2 text-gray-700 {cell_border}", {cell.clone()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn row_class(row_idx: usize, striped: bool, selected: bool, clickable: bool) -> String {
    let background = if selected {
        "bg-blue-50"
    } else if striped && row_idx % 2 == 1 {
        "bg-gray-50"
    } else {
        "bg-white"
    };
    let cursor = if clickable { " cursor-pointer hover:bg-blue-50" } else { "" };
    format!("{background}{cursor}")
}
