use criterion::{Criterion, criterion_group, criterion_main};
use giallo_fence::Config;

const ARTICLE: &str = r#"# Fetching data

Some text before the first block.

```ts
///highlight:2-3
export async function load({ fetch }) {
	const res = await fetch('/api/items');
	return { items: await res.json() };
}
```

And a tilde block showing a fence:

~~~md
&tripgrave;sh
npm install
&tripgrave;
~~~

```css
.code-wrapper pre {
	overflow-x: auto;
}
```
"#;

fn preprocess_article_benchmark(c: &mut Criterion) {
    let preprocessor = Config::default()
        .build_preprocessor()
        .expect("Failed to load the builtin registry");

    c.bench_function("preprocess article", |b| {
        b.iter(|| {
            let result = preprocessor.process(ARTICLE, "articles/fetching/+page.md");
            std::hint::black_box(result);
        })
    });
}

criterion_group!(benches, preprocess_article_benchmark);
criterion_main!(benches);
