//! The embedded search page.

use crate::config::SearchConfig;

/// Render the search page with form defaults taken from configuration
pub fn index_html(search: &SearchConfig) -> String {
    PAGE.replace("__DEFAULT_LIMIT__", &search.default_limit.to_string())
        .replace("__YEAR_START__", &search.default_year_start.to_string())
        .replace("__YEAR_END__", &search.default_year_end.to_string())
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Scholar Search</title>
    <style>
        body { font-family: Arial; margin: 20px; background: #f5f5f5; min-height: 100vh; display: flex; flex-direction: column; }
        .content { flex: 1; max-width: 900px; }
        h1 { color: #333; }
        .tagline { font-size: 18px; font-weight: bold; color: #555; }

        .status-message { padding: 10px; margin: 10px 0; border-radius: 0; display: none; }
        .status-message.success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
        .status-message.warning { background: #fff3cd; color: #856404; border: 1px solid #ffc107; }
        .status-message.error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }

        input[type="text"], input[type="number"] { padding: 8px; margin: 5px 0; }

        button { padding: 8px 16px; background: rgb(100, 149, 237); color: white; border: none; cursor: pointer; margin-right: 5px; border-radius: 0; }
        button:hover { background: #5a8dd4; }

        .search-form { background: white; padding: 20px; border: 1px solid #ddd; border-radius: 0; }
        .search-form label { display: block; margin: 10px 0 5px 0; font-weight: bold; }
        .search-form input[type="text"],
        .search-form input[type="number"] { width: 100%; box-sizing: border-box; }

        .form-row { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 15px; }

        .result { background: white; padding: 15px; margin: 10px 0; border: 1px solid #ddd; border-radius: 0; }
        .result h3 { margin: 0 0 10px 0; }
        .result a { color: #007bff; text-decoration: none; }
        .result a:hover { text-decoration: underline; }
        .result mark { background: #ffe08a; padding: 0 1px; }

        .info { color: #666; font-size: 14px; margin-bottom: 10px; }
        .abstract { margin-top: 10px; padding: 10px; background: #f9f9f9; border-left: 3px solid #007bff; font-size: 14px; }
        .links { margin-top: 10px; }
        .citation { width: 100%; box-sizing: border-box; margin-top: 10px; font-family: monospace; font-size: 13px; height: 60px; }

        .loading { display: none; padding: 10px; background: #fff3cd; border: 1px solid #ffc107; border-radius: 0; margin: 10px 0; }
        .loading.active { display: block; }

        footer { margin-top: 40px; padding: 20px; text-align: center; color: #666; }
    </style>
</head>
<body>
    <div class="content">
        <h1>Scholar Search</h1>
        <p class="tagline">Discover. Learn. Cite.</p>
        <p>Find academic publications by keyword, filtered by publication year.</p>

        <div id="status-message" class="status-message"></div>
        <div id="loading" class="loading">Searching...</div>

        <div class="search-form">
            <label>Keywords to search in title and abstract:</label>
            <input type="text" id="query" placeholder="e.g. stem cells">

            <div class="form-row">
                <div>
                    <label>Number of results:</label>
                    <input type="number" id="limit" value="__DEFAULT_LIMIT__" min="1" max="100">
                </div>
                <div>
                    <label>Start year:</label>
                    <input type="number" id="year_start" value="__YEAR_START__" min="1900" max="2100">
                </div>
                <div>
                    <label>End year:</label>
                    <input type="number" id="year_end" value="__YEAR_END__" min="1900" max="2100">
                </div>
            </div>

            <br>
            <button onclick="startSearch()">Search</button>
        </div>

        <div id="summary"></div>
        <div id="results"></div>
    </div>

    <footer>
        <p>Scholar Search</p>
    </footer>

    <script>
        function showStatusMessage(message, kind) {
            const element = document.getElementById('status-message');
            element.textContent = message;
            element.className = 'status-message ' + kind;
            element.style.display = 'block';

            setTimeout(() => {
                element.style.display = 'none';
            }, 5000);
        }

        function escapeHtml(text) {
            const div = document.createElement('div');
            div.textContent = text;
            return div.innerHTML;
        }

        // The server marks highlighted terms with **..**; turn them into <mark>
        function emphasize(text) {
            return escapeHtml(text).replace(/\*\*([^*]+)\*\*/g, '<mark>$1</mark>');
        }

        function startSearch() {
            const query = document.getElementById('query').value;
            const request = {
                query: query,
                limit: parseInt(document.getElementById('limit').value),
                year_start: parseInt(document.getElementById('year_start').value),
                year_end: parseInt(document.getElementById('year_end').value),
            };

            document.getElementById('loading').classList.add('active');

            fetch('/search', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(request)
            })
            .then(r => r.json())
            .then(data => {
                document.getElementById('loading').classList.remove('active');
                if (data.status === 'warning') {
                    showStatusMessage(data.message, 'warning');
                    return;
                }
                renderReply(data);
            })
            .catch(err => {
                document.getElementById('loading').classList.remove('active');
                showStatusMessage('Something went wrong: ' + err, 'error');
            });
        }

        function loadResults() {
            fetch('/results')
                .then(r => r.json())
                .then(data => {
                    if (data.status !== 'empty') {
                        renderReply(data);
                    }
                });
        }

        function renderReply(data) {
            const summary = document.getElementById('summary');
            const container = document.getElementById('results');
            container.innerHTML = '';

            summary.innerHTML = '<h2>Search Results for: ' + escapeHtml(data.query) + '</h2>';

            if (data.results.length === 0) {
                container.innerHTML = '<p>No results found.</p>';
                return;
            }

            data.results.forEach((result, idx) => {
                const div = document.createElement('div');
                div.className = 'result';

                let links = '';
                if (result.access_url) {
                    links += '<a href="' + result.access_url + '" target="_blank">Access Journal</a> ';
                }
                if (result.preview_url) {
                    links += '<a href="' + result.preview_url + '" target="_blank">Preview Journal</a>';
                }

                div.innerHTML =
                    '<h3>' + (idx + 1) + '. ' + escapeHtml(result.title) + '</h3>' +
                    '<div class="info"><b>Authors:</b> ' + escapeHtml(result.authors) + '</div>' +
                    '<div class="abstract">... ' + emphasize(result.abstract_text) + ' ...</div>' +
                    '<div class="links">' + links + '</div>' +
                    '<textarea class="citation" readonly>' + escapeHtml(result.citation) + '</textarea>';

                container.appendChild(div);
            });
        }

        loadResults();
    </script>
</body>
</html>"#;
