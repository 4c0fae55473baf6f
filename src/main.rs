use std::cell::Cell;
use std::rc::Rc;

use ilist::{
    ArrayList, DLinkedList, DataLoader, IList, Labels, LoaderError, LoaderSettings, VecDataset,
};
use log::{info, LevelFilter};
use rand::Rng;
use simple_logger::SimpleLogger;

const COUNT: usize = 12;
const BATCH_SIZE: usize = 5;
const SEED: u64 = 42;

fn main() -> Result<(), LoaderError> {
    // RUST_LOG overrides the level
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Debug)
        .env()
        .init()
    {
        eprintln!("logger already installed: {}", err);
    }

    lists();
    batches()
}

fn fill<L: IList<u32>>(list: &mut L) {
    let mut rng = rand::thread_rng();
    for _ in 0..COUNT {
        list.add(rng.gen_range(0..100));
    }
}

fn lists() {
    let released = Rc::new(Cell::new(0));
    let counter = released.clone();
    let mut linked = DLinkedList::new().with_delete_user_data(move |list: &DLinkedList<u32>| {
        counter.set(counter.get() + list.len());
    });
    let mut array = ArrayList::with_capacity(4);

    fill(&mut linked);
    fill(&mut array);
    println!("linked: {}", linked);
    println!("array:  {} (capacity {})", array, array.capacity());

    let mut cursor = linked.cursor_mut();
    while !cursor.is_end() {
        if cursor.current().map_or(false, |x| *x % 2 == 1) {
            cursor.remove_current();
        }
        cursor.move_next();
    }
    println!("linked, odd removed: {}", linked);

    let mut backwards = vec![];
    let mut it = linked.bbegin();
    while it != linked.bend() {
        backwards.extend(it.get().copied());
        it.move_next();
    }
    println!("linked, backwards: {:?}", backwards);

    linked.clear();
    info!("delete callback saw {} elements", released.get());
}

fn batches() -> Result<(), LoaderError> {
    let data: Vec<[f32; 2]> = (0..COUNT).map(|i| [i as f32, (i * i) as f32]).collect();
    let labels = (0..COUNT).map(|i| i % 3).collect();
    let dataset = VecDataset::new(data, Labels::PerItem(labels))?;

    let settings = LoaderSettings {
        batch_size: BATCH_SIZE,
        seed: Some(SEED),
        ..Default::default()
    };
    let loader = DataLoader::new(&dataset, settings)?;
    for (i, batch) in loader.iter().enumerate() {
        let batch = batch?;
        println!("batch {}: labels {:?}", i, batch.labels());
    }
    Ok(())
}
