use datapipe::stream::*;
use tokio::runtime::Runtime;

#[test]
fn test_from_items_round_trip() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items(vec![1, 2, 3, 4, 5]);
        let result = stream.collect_remaining().await.unwrap();
        assert_eq!(result, vec![1, 2, 3, 4, 5]);
    });
}

#[test]
fn test_from_items_preserves_falsy_values() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items(vec![0, 0, 1, 0]);
        let result = stream.collect_remaining().await.unwrap();
        assert_eq!(result, vec![0, 0, 1, 0]);
    });
}

#[test]
fn test_empty() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = empty::<i32>();
        let result = stream.collect_remaining().await.unwrap();
        assert_eq!(result, Vec::<i32>::new());
    });
}

#[test]
fn test_from_fn_with_take() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut n = 0;
        let stream = from_fn(move || {
            n += 1;
            let value = n;
            async move { Ok(Some(value)) }
        });
        let result = stream.take(5).collect_remaining().await.unwrap();
        assert_eq!(result, vec![1, 2, 3, 4, 5]);
    });
}

#[test]
fn test_from_fn_signals_end() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut n = 0;
        let stream = from_fn(move || {
            n += 1;
            let value = n;
            async move {
                if value > 3 {
                    Ok(None)
                } else {
                    Ok(Some(value))
                }
            }
        });
        let result = stream.collect_remaining().await.unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    });
}

#[test]
fn test_take() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items((0..10).collect::<Vec<_>>());
        let result = stream.take(3).collect_remaining().await.unwrap();
        assert_eq!(result, vec![0, 1, 2]);
    });
}

#[test]
fn test_take_more_than_available() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items(vec![1, 2]);
        let result = stream.take(10).collect_remaining().await.unwrap();
        assert_eq!(result, vec![1, 2]);
    });
}

#[test]
fn test_take_zero() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items(vec![1, 2, 3]);
        let result = stream.take(0).collect_remaining().await.unwrap();
        assert_eq!(result, Vec::<i32>::new());
    });
}

#[test]
fn test_negative_take_is_identity() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items((0..10).collect::<Vec<_>>());
        let result = stream.take(-1).collect_remaining().await.unwrap();
        assert_eq!(result, (0..10).collect::<Vec<_>>());
    });
}

#[test]
fn test_skip() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items((0..10).collect::<Vec<_>>());
        let result = stream.skip(7).collect_remaining().await.unwrap();
        assert_eq!(result, vec![7, 8, 9]);
    });
}

#[test]
fn test_negative_skip_is_identity() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items((0..10).collect::<Vec<_>>());
        let result = stream.skip(-1).collect_remaining().await.unwrap();
        assert_eq!(result, (0..10).collect::<Vec<_>>());
    });
}

#[test]
fn test_skip_past_end() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items(vec![1, 2]);
        let result = stream.skip(5).collect_remaining().await.unwrap();
        assert_eq!(result, Vec::<i32>::new());
    });
}

#[test]
fn test_skip_then_take() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream = from_items((0..10).collect::<Vec<_>>());
        let result = stream.skip(2).take(3).collect_remaining().await.unwrap();
        assert_eq!(result, vec![2, 3, 4]);
    });
}

#[test]
fn test_exhaustion_is_idempotent() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut stream = from_items(vec![42]);
        assert_eq!(stream.next().await.unwrap(), Some(42));
        assert_eq!(stream.next().await.unwrap(), None);
        assert_eq!(stream.next().await.unwrap(), None);
        assert_eq!(stream.next().await.unwrap(), None);
    });
}

#[test]
fn test_exhaustion_is_idempotent_through_take_and_skip() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let mut stream = from_items(vec![1, 2, 3]).skip(1).take(1);
        assert_eq!(stream.next().await.unwrap(), Some(2));
        assert_eq!(stream.next().await.unwrap(), None);
        assert_eq!(stream.next().await.unwrap(), None);
    });
}

#[test]
fn test_boxed_stream_still_pulls() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let stream: BoxDataStream<i32> = from_items(vec![1, 2, 3]).boxed();
        let result = stream.collect_remaining().await.unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    });
}
