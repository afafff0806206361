use task_mirror::client::Client;
use task_mirror::config;
use task_mirror::view::TaskListView;
use task_mirror::TaskListController;

#[tokio::main]
async fn main() {
    env_logger::init();

    let base_url = match config::endpoint_from_env() {
        Some(url) => url,
        None => {
            eprintln!("Please set {} to the collection endpoint", config::ENDPOINT_ENV_VAR);
            return;
        }
    };

    let client = match Client::new(&base_url) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    log::info!("Mirroring the collection at {}", client.base_url());

    let mut controller = TaskListController::new(client);
    if let Err(err) = controller.fetch_all().await {
        eprintln!("Initial fetch failed: {}", err);
        return;
    }

    match TaskListView::from_tasks(controller.tasks()) {
        TaskListView::Empty => println!("{}", task_mirror::view::EMPTY_MESSAGE),
        TaskListView::Rows(rows) => {
            for row in rows {
                let marker = if row.done { "x" } else { " " };
                println!("[{}] {}\t{}", marker, row.title, row.date);
            }
        }
    }
}
